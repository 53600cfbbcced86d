//! Platform glue shared by the web and desktop builds.

use std::future::Future;

/// Run `future` to completion: spawned on the browser's microtask queue on
/// the web, blocked on in place on desktop.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        futures::executor::block_on(future);
    }
}
