/*!
This crate builds the dataset panel of the board. It reads the statistics JSON computed for a tabular dataset and renders a summary of the target column, the shape of each dataset split, the share of each feature type, and a chart of the target distribution.

```
let statistics = hboard_dataset::DatasetStatistics::from_json(r#"{
	"target": { "name": "y", "taskType": "binary" },
	"datasetShape": { "train": [1000, 20] },
	"featureDistribution": { "nContinuous": 20 },
	"targetDistribution": { "yes": 100, "no": 20 }
}"#)?;
let html = hboard_dataset::render_panel(&statistics, &hboard_dataset::PanelConfig::default())?;
assert!(html.contains("Distribution of y"));
# Ok::<(), hboard_dataset::Error>(())
```
*/

pub mod config;
pub mod error;
pub mod feature_distribution;
pub mod panel;
pub mod statistics;
pub mod summary;
pub mod target_distribution;

pub use self::config::PanelConfig;
pub use self::error::{Error, Result};
pub use self::panel::{render_page, render_panel, DatasetPanel, DatasetView};
pub use self::statistics::{DatasetStatistics, TaskType};
pub use self::target_distribution::target_distribution_options;
