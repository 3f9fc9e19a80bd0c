pub mod layer;
pub mod location;
pub mod panels;
pub mod region;
pub mod search;
pub mod view_state;

pub use layer::{LayerConfig, LayerRegistry, LayerType};
pub use location::LocationInfo;
pub use panels::{AnalyticsTab, PanelVisibility};
pub use region::{StateId, StateRecord, StateSummary};
pub use search::{RequestId, SearchCompletion, SearchHistory, SearchSession};
pub use view_state::{ViewState, ViewStatePatch};
