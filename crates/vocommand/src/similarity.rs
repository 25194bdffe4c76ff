//! Edit-distance based similarity scoring for fuzzy trigger matching.

/// Levenshtein distance between two strings, counted in characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            let cost = if b[i - 1] == a[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j - 1] + cost)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j] + 1);
        }
    }

    matrix[b.len()][a.len()]
}

/// Similarity ratio in `[0.0, 1.0]`.
///
/// Defined as `1 - distance / max(len(a), len(b))`, with character counts
/// as lengths. Two empty strings are fully similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}
