
/// Install a test logger once; repeated calls are harmless.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
