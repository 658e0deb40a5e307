use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// Counts insertions, deletions and substitutions of single characters, each
/// with cost 1. Operates on `char`s, not bytes.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Row i aligns the first i chars of `b`, column j the first j chars of `a`
    let mut matrix = vec![vec![0; a_chars.len() + 1]; b_chars.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for (i, b_char) in b_chars.iter().enumerate() {
        for (j, a_char) in a_chars.iter().enumerate() {
            matrix[i + 1][j + 1] = if a_char == b_char {
                matrix[i][j]
            } else {
                1 + min(
                    matrix[i][j], // substitution
                    min(
                        matrix[i + 1][j], // insertion
                        matrix[i][j + 1], // deletion
                    ),
                )
            };
        }
    }

    matrix[b_chars.len()][a_chars.len()]
}

/// Levenshtein distance with an upper bound.
///
/// Returns `Some(d)` exactly when `distance(a, b) == d` and `d <= max`, so it can
/// stand in for [`distance`] wherever only close matches matter. Bails out when
/// the length difference already exceeds `max` or when a whole row of the table
/// does.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    distance_within_chars(&a_chars, b, max)
}

/// [`distance_within`] with `a` already split into chars, so a query compared
/// against many candidates is only decoded once.
pub fn distance_within_chars(a_chars: &[char], b: &str, max: usize) -> Option<usize> {
    if a_chars.len().abs_diff(b.chars().count()) > max {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=a_chars.len()).collect();
    let mut curr_row = vec![0; a_chars.len() + 1];

    for (i, b_char) in b.chars().enumerate() {
        curr_row[0] = i + 1;
        let mut row_min = curr_row[0];

        for (j, a_char) in a_chars.iter().enumerate() {
            curr_row[j + 1] = if *a_char == b_char {
                prev_row[j]
            } else {
                1 + min(prev_row[j], min(curr_row[j], prev_row[j + 1]))
            };
            row_min = min(row_min, curr_row[j + 1]);
        }

        // Cells never decrease along a path, so nothing below can recover
        if row_min > max {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[a_chars.len()];
    (distance <= max).then_some(distance)
}
