pub mod extractor;
pub mod gemini_service;
pub mod location;
pub mod refinement;
