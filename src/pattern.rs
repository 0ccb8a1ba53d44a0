use crate::error::CatError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub bucket: String,
    pub prefix: String,
}

pub fn parse(arg: &str) -> Result<Pattern, CatError> {
    let rest = arg
        .strip_prefix('/')
        .ok_or_else(|| CatError::InvalidPattern(arg.to_string()))?;

    let (bucket, prefix) = match rest.split_once('/') {
        Some((bucket, prefix)) => (bucket, prefix),
        None => (rest, ""),
    };

    Ok(Pattern {
        bucket: bucket.to_string(),
        prefix: prefix.to_string(),
    })
}

pub fn parse_all(args: &[String]) -> Result<Vec<Pattern>, CatError> {
    args.iter().map(|arg| parse(arg)).collect()
}
