pub mod assets;
pub mod bitmap;
pub mod canvas;
pub mod gradient;
pub mod utils;
