pub use waymark_core::format::OutputFormat;
