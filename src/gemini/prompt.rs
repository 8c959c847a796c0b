/// Builds the prompt sent to the image model for one side of the pair.
///
/// Inputs are interpolated verbatim: no escaping, no trimming. An empty
/// `style` yields an empty constraint clause.
pub fn compose(description: &str, style: &str) -> String {
    format!(
        "Generate a high-quality image.\n\
         Concept: {}.\n\
         Style constraint: {}.\n\
         Ensure the image is visually striking and high resolution.",
        description, style
    )
}
