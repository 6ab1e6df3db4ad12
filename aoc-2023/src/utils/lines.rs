use aoc_solver::{ParseError, SolveError};

/// Parse every line with `parse_line`, stopping at the first failure.
///
/// The error names the offending line: `(line 3) expected ...`.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            parse_line(line)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", idx + 1, e)))
        })
        .collect()
}

pub fn solve_failed(err: anyhow::Error) -> SolveError {
    SolveError::SolveFailed(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_parse_lines_reports_line_number() {
        let parsed = parse_lines("1\n2\n3", |l| Ok(l.parse::<u8>()?));
        assert_eq!(parsed.unwrap(), vec![1, 2, 3]);

        let err = parse_lines("1\nx\n3", |l| {
            l.parse::<u8>().map_err(|_| anyhow!("'{}' is not a number", l))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: (line 2) 'x' is not a number");
    }
}
