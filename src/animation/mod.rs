//! Tick-driven animations: the response typewriter, intro typers, loading
//! bar, icon cycler and background rain. Each owns an [`AnimationHandle`]
//! so teardown can stop it at any point.

pub mod icon;
pub mod loading;
pub mod rain;
pub mod ticker;
pub mod typewriter;

pub use icon::IconCycler;
pub use loading::LoadingBar;
pub use rain::MatrixRain;
pub use ticker::{AnimationHandle, Ticker};
pub use typewriter::{RevealOutcome, RevealState, TextTyper, Typewriter};
