use crate::constants::JSON_SUFFIX;

/// Extracts every quoted substring ending in `.json` from a listing page.
///
/// The input is decoded lossily and processed line by line. On each line the text
/// between a pair of double quotes is a candidate; candidates ending exactly in
/// `.json` are returned in order of appearance. Duplicates are kept and nothing is
/// URL-decoded. A quote left open at the end of a line does not produce a
/// candidate, and bare `foo.json` text outside quotes is ignored.
///
/// The whole page must be passed at once: links are never carried across calls.
pub fn extract_json_links(data: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(data);
    let mut links = Vec::new();

    for line in text.split('\n') {
        if !line.contains(JSON_SUFFIX) {
            continue;
        }
        let segments: Vec<&str> = line.split('"').collect();
        // Odd segments sit between a pair of quotes; the last one has no closing quote.
        for (i, segment) in segments.iter().enumerate() {
            if i % 2 == 1 && i + 1 < segments.len() && segment.ends_with(JSON_SUFFIX) {
                links.push((*segment).to_string());
            }
        }
    }

    links
}
