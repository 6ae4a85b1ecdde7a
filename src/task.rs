//! Local task spawning for completion handlers.

use std::future::Future;

/// Run `fut` on the browser event loop. Outside the browser there is no
/// network to wait on, so the future is dropped unpolled.
pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    {
        let _unpolled = fut;
    }
}
