/// Finds and replaces all instances of `needle` with the replacement byte.
///
/// ## Limitations
///
/// The scalar loop auto-vectorizes. Enabling the `multiversion` feature
/// additionally compiles it for several SIMD targets and dispatches at
/// runtime.
#[inline]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub(crate) fn replace_all_bytes(haystack: &mut [u8], needle: u8, replacement: u8) {
    for b in haystack.iter_mut() {
        if *b == needle {
            *b = replacement;
        }
    }
}
