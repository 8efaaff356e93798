use garage_lib::Repository;
use tokio::task::spawn_blocking;

pub mod vehicle_form;
pub mod vehicle_list;

/// Run a repository operation off the UI thread. Errors are flattened to strings so they can
/// travel inside messages.
pub fn blocking<T, F>(
    repo: &Repository,
    f: F,
) -> impl Future<Output = Result<T, String>> + use<T, F>
where
    T: Send + 'static,
    F: FnOnce(&Repository) -> garage_lib::Result<T> + Send + 'static,
{
    let repo = repo.clone();
    async move {
        spawn_blocking(move || f(&repo).map_err(|e| e.to_string()))
            .await
            .unwrap_or_else(|e| Err(e.to_string()))
    }
}
