//! Sequential filename generation for dataset files.
//!
//! Batch-produced datasets name their files by position (`img_0.jpg`,
//! `img_1.jpg`, …). [`progressive_filenames`] is the single source of that
//! convention: an infinite lazy iterator substituting a counter into a
//! `{}` placeholder, restartable by construction.

/// Infinite iterator of progressively numbered filenames.
///
/// The first `{}` in `pattern` is replaced with a counter starting at 0.
/// A pattern without a placeholder repeats unchanged.
///
/// # Examples
/// ```
/// # use letterbox::naming::progressive_filenames;
/// let names: Vec<String> = progressive_filenames("file_{}.ext").take(3).collect();
/// assert_eq!(names, vec!["file_0.ext", "file_1.ext", "file_2.ext"]);
/// ```
pub fn progressive_filenames(pattern: &str) -> impl Iterator<Item = String> + '_ {
    (0u64..).map(move |i| pattern.replacen("{}", &i.to_string(), 1))
}
