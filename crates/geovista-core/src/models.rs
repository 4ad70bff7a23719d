pub mod criteria;
pub mod dataset;
pub mod feature;

pub use criteria::FilterCriteria;
pub use dataset::{DatasetInfo, PointDataset};
pub use feature::{FeatureId, PointFeature, Position};
