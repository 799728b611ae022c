// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decoder;
pub mod sequence_tables;

// Re-export.
pub use decoder::*;
pub use sequence_tables::*;
