// The widget set: the lifecycle contract plus the two stock components.

use async_trait::async_trait;

use crate::models::RenderData;

mod listing;
mod search;

pub use listing::{ALL_MAKES, MakeOption, StockListing};
pub use search::{DEFAULT_RESULT_LIMIT, StockSearch};

/// Props components react to.
pub const OBSERVED_PROPS: &[&str] = &["dealer-id", "primary-col"];

/// Mount/unmount/update contract for a host-embedded component.
///
/// The host runtime serializes these calls on its event loop, so
/// implementations hold no locks and expect no concurrent callers.
#[async_trait]
pub trait Component {
    /// The component was attached to the host page.
    async fn on_mount(&mut self);

    /// The component was detached. Nothing to release by default.
    fn on_unmount(&mut self) {}

    /// One observed prop changed value.
    async fn on_props_changed(
        &mut self,
        name: &str,
        old_value: Option<&str>,
        new_value: Option<&str>,
    );

    /// Current payload for the host's render path.
    fn view(&self) -> &RenderData;
}
