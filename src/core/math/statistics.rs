//! Descriptive statistics over numeric columns that may contain missing values.

use serde::Serialize;

use crate::core::error::ArithError;

/// Tokens read as a missing value.
const MISSING_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "None", "-"];

/// How `clean` treats missing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    #[default]
    Drop,
    Zero,
    Mean,
    Median,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub missing: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` below two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

pub fn parse_column(tokens: &[&str]) -> Result<Vec<Option<f64>>, ArithError> {
    tokens
        .iter()
        .map(|raw| {
            let t = raw.trim();
            if MISSING_TOKENS.contains(&t) {
                Ok(None)
            } else {
                // f64 parsing accepts any casing of "nan"; those are missing too
                t.parse::<f64>()
                    .map(|v| if v.is_nan() { None } else { Some(v) })
                    .map_err(|_| ArithError::parse_number(raw))
            }
        })
        .collect()
}

pub fn count_missing(column: &[Option<f64>]) -> usize {
    column.iter().filter(|v| v.is_none()).count()
}

/// Resolve missing entries according to `policy`.
pub fn clean(column: &[Option<f64>], policy: MissingPolicy) -> Result<Vec<f64>, ArithError> {
    let present: Vec<f64> = column.iter().flatten().copied().collect();
    let fill = match policy {
        MissingPolicy::Drop => return Ok(present),
        MissingPolicy::Zero => 0.0,
        MissingPolicy::Mean => mean(&present)?,
        MissingPolicy::Median => median(&mut present.clone())?,
    };
    Ok(column.iter().map(|v| v.unwrap_or(fill)).collect())
}

/// Calculates the mean (average) of a dataset.
pub fn mean(data: &[f64]) -> Result<f64, ArithError> {
    if data.is_empty() {
        Err(ArithError::EmptyData)
    } else {
        Ok(data.iter().sum::<f64>() / data.len() as f64)
    }
}

/// Population variance.
pub fn variance(data: &[f64]) -> Result<f64, ArithError> {
    let mean_value = mean(data)?;
    Ok(data.iter().map(|x| (x - mean_value).powi(2)).sum::<f64>() / data.len() as f64)
}

/// Sample variance (n - 1 denominator).
pub fn sample_variance(data: &[f64]) -> Result<f64, ArithError> {
    if data.len() < 2 {
        return Err(ArithError::EmptyData);
    }
    let mean_value = mean(data)?;
    Ok(data.iter().map(|x| (x - mean_value).powi(2)).sum::<f64>() / (data.len() - 1) as f64)
}

pub fn standard_deviation(data: &[f64]) -> Result<f64, ArithError> {
    variance(data).map(|v| v.sqrt())
}

pub fn median(data: &mut [f64]) -> Result<f64, ArithError> {
    percentile(data, 50.0)
}

pub fn min(data: &[f64]) -> Result<f64, ArithError> {
    data.iter().copied().reduce(f64::min).ok_or(ArithError::EmptyData)
}

pub fn max(data: &[f64]) -> Result<f64, ArithError> {
    data.iter().copied().reduce(f64::max).ok_or(ArithError::EmptyData)
}

/// Calculates the p-th percentile of a dataset (linear interpolation).
pub fn percentile(data: &mut [f64], p: f64) -> Result<f64, ArithError> {
    if data.is_empty() {
        return Err(ArithError::EmptyData);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(ArithError::InvalidPercentile(p));
    }
    data.sort_by(|a, b| a.total_cmp(b));
    let rank = (p / 100.0) * (data.len() as f64 - 1.0);
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;
    if lower_index == upper_index {
        Ok(data[lower_index])
    } else {
        let f = rank - lower_index as f64;
        Ok((1.0 - f) * data[lower_index] + f * data[upper_index])
    }
}

pub fn describe(column: &[Option<f64>], policy: MissingPolicy) -> Result<Summary, ArithError> {
    let mut values = clean(column, policy)?;
    if values.is_empty() {
        return Err(ArithError::EmptyData);
    }
    Ok(Summary {
        count: values.len(),
        missing: count_missing(column),
        mean: mean(&values)?,
        std: sample_variance(&values).ok().map(f64::sqrt),
        min: min(&values)?,
        q1: percentile(&mut values, 25.0)?,
        median: percentile(&mut values, 50.0)?,
        q3: percentile(&mut values, 75.0)?,
        max: max(&values)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_variance() {
        assert_eq!(variance(&[1.0, 2.0, 3.0]).unwrap(), 2.0f64 / 3.0f64);
        assert_eq!(sample_variance(&[1.0, 2.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_standard_deviation() {
        assert_eq!(
            standard_deviation(&[1.0, 2.0, 3.0]).unwrap(),
            (2.0f64 / 3.0f64).sqrt()
        );
    }

    #[test]
    fn test_median() {
        let mut data = vec![3.0, 1.0, 2.0];
        assert_eq!(median(&mut data).unwrap(), 2.0);
        let mut even = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&mut even).unwrap(), 2.5);
    }

    #[test]
    fn test_percentile() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&mut data, 50.0).unwrap(), 3.0);
        assert_eq!(percentile(&mut data, 25.0).unwrap(), 2.0);
        assert_eq!(
            percentile(&mut data, 101.0),
            Err(ArithError::InvalidPercentile(101.0))
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(mean(&[]), Err(ArithError::EmptyData));
        assert_eq!(min(&[]), Err(ArithError::EmptyData));
        assert_eq!(sample_variance(&[1.0]), Err(ArithError::EmptyData));
    }

    #[test]
    fn test_parse_column_missing_tokens() {
        let col = parse_column(&["1", "NA", "", "2.5", "nan"]).unwrap();
        assert_eq!(col, vec![Some(1.0), None, None, Some(2.5), None]);
        assert_eq!(count_missing(&col), 3);
        assert!(parse_column(&["1", "x"]).is_err());
    }

    #[test]
    fn test_nan_in_any_case_is_missing() {
        let col = parse_column(&["1", "NAN", "3", "-nan", "Nan"]).unwrap();
        assert_eq!(col, vec![Some(1.0), None, Some(3.0), None, None]);
        let s = describe(&col, MissingPolicy::Drop).unwrap();
        assert_eq!(s.missing, 3);
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.q3, 2.5);
        assert_eq!(s.max, 3.0);
    }

    #[test]
    fn test_clean_policies() {
        let col = vec![Some(1.0), None, Some(3.0), Some(8.0)];
        assert_eq!(clean(&col, MissingPolicy::Drop).unwrap(), vec![1.0, 3.0, 8.0]);
        assert_eq!(clean(&col, MissingPolicy::Zero).unwrap(), vec![1.0, 0.0, 3.0, 8.0]);
        assert_eq!(clean(&col, MissingPolicy::Mean).unwrap(), vec![1.0, 4.0, 3.0, 8.0]);
        assert_eq!(clean(&col, MissingPolicy::Median).unwrap(), vec![1.0, 3.0, 3.0, 8.0]);
        assert_eq!(clean(&[None, None], MissingPolicy::Mean), Err(ArithError::EmptyData));
    }

    #[test]
    fn test_describe_single_value_has_no_std() {
        let s = describe(&[Some(4.0), None], MissingPolicy::Drop).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.missing, 1);
        assert_eq!(s.std, None);
        assert_eq!(s.median, 4.0);
    }
}
