mod algorithm;

pub use algorithm::AlgorithmEntry;
