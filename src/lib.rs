#![forbid(unsafe_code)]

pub mod camera;
pub mod choreo;
pub mod clock;
pub mod dataset;
pub mod ease;
pub mod error;
pub mod geo;

pub use camera::{AngleSweep, CameraAngles, OrbitControls, ambient_azimuthal, angle_at};
pub use choreo::{GlobeStage, Intro, IntroConfig};
pub use clock::{IntroClock, Phase};
pub use dataset::GeoDataset;
pub use ease::Ease;
pub use error::{SpheruleError, SpheruleResult};
pub use geo::{GeoPoint, MapSize, project};
