/// `ceil(total / page_size)`, zero for an empty result set.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size as usize) as u32
}

/// Slice bounds of a 1-based page, clamped to `len`.
pub fn page_bounds(len: usize, page: u32, page_size: u32) -> (usize, usize) {
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    let end = start.saturating_add(page_size as usize);
    (start.min(len), end.min(len))
}

/// "artesanias-textiles" -> "Artesanias Textiles"
pub fn format_label(raw: &str) -> String {
    raw.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
