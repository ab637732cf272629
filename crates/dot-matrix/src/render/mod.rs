pub mod ascii;
#[cfg(feature = "svg")]
pub mod svg;
