/// Seam for the external navigation resolver. The shell never
/// dereferences a target itself; it only hands the opaque address over.
pub(crate) trait Router {
    fn dispatch(&self, target: &str);
}

/// Default router: records the intent in the log and leaves resolution
/// to the host environment.
pub(crate) struct LogRouter;

impl Router for LogRouter {
    fn dispatch(&self, target: &str) {
        log::info!("navigation intent: {target}");
    }
}
