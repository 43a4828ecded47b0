// Heuristic extraction core.
// Three pure, stateless text-analysis functions: about-blob segmentation,
// trait derivation, and achievement-stat extraction. No I/O, no LLM calls —
// the service layer wraps these with thin handlers.

pub mod handlers;
pub mod segmenter;
pub mod stats;
pub mod traits;
