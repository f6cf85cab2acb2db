pub mod adjust;
pub mod aspect;
pub mod canvas;
pub mod config;
pub mod consts;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod mask;
pub mod output_size;
pub mod pointer;
pub mod raster;
pub mod render;
pub mod select;
pub mod session;
pub mod source;
