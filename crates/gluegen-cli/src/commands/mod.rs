pub mod check;
pub mod generate;
pub mod pipeline;

#[cfg(test)]
mod pipeline_tests;
