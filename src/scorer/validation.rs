use crate::config::Ruleset;
use crate::consts::MIN_FACE;
use crate::error::{DiceScoreError, DsResult};
use tracing::debug;

/// Anything a hand of raw die values can be read from.
///
/// `None` stands for an absent hand and is rejected with
/// [`DiceScoreError::NullInput`].
pub trait DiceSource {
    fn dice(&self) -> Option<&[i32]>;
}

impl DiceSource for [i32] {
    fn dice(&self) -> Option<&[i32]> {
        Some(self)
    }
}

impl<const K: usize> DiceSource for [i32; K] {
    fn dice(&self) -> Option<&[i32]> {
        Some(self.as_slice())
    }
}

impl DiceSource for Vec<i32> {
    fn dice(&self) -> Option<&[i32]> {
        Some(self.as_slice())
    }
}

impl<T: DiceSource + ?Sized> DiceSource for &T {
    fn dice(&self) -> Option<&[i32]> {
        (**self).dice()
    }
}

impl<T: DiceSource> DiceSource for Option<T> {
    fn dice(&self) -> Option<&[i32]> {
        self.as_ref().and_then(|t| t.dice())
    }
}

/// Checks presence, arity and face range, in that order.
/// Stops at the first out-of-range die.
pub fn validate<'a, H: DiceSource + ?Sized>(
    ruleset: &Ruleset,
    hand: &'a H,
) -> DsResult<&'a [i32]> {
    let values = hand.dice().ok_or_else(|| {
        debug!("Rejected hand: missing");
        DiceScoreError::NullInput
    })?;

    if values.len() != ruleset.dice {
        debug!(
            "Rejected hand: {} dice, expected {}",
            values.len(),
            ruleset.dice
        );
        return Err(DiceScoreError::InvalidArity {
            expected: ruleset.dice,
            actual: values.len(),
        });
    }

    let max = ruleset.max_face();
    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|(_, &v)| !(MIN_FACE..=max).contains(&v))
    {
        debug!("Rejected hand: dice[{}] = {} is out of range", index, value);
        return Err(DiceScoreError::ValueOutOfRange {
            index,
            value,
            min: MIN_FACE,
            max,
        });
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reference_hand() {
        let hand = [1, 2, 3, 4, 8];
        let values = validate(&Ruleset::default(), &hand).unwrap();
        assert_eq!(values, &[1, 2, 3, 4, 8]);
    }

    #[test]
    fn missing_hand_is_null_input() {
        let hand: Option<&[i32]> = None;
        assert!(matches!(
            validate(&Ruleset::default(), &hand),
            Err(DiceScoreError::NullInput)
        ));
    }

    #[test]
    fn present_option_is_unwrapped() {
        let hand = Some(vec![8, 8, 8, 8, 8]);
        assert!(validate(&Ruleset::default(), &hand).is_ok());
    }

    #[test]
    fn reports_first_bad_index() {
        let hand = vec![1, 0, 9, 2, 3];
        match validate(&Ruleset::default(), &hand) {
            Err(DiceScoreError::ValueOutOfRange {
                index,
                value,
                min,
                max,
            }) => {
                assert_eq!((index, value, min, max), (1, 0, 1, 8));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn arity_is_checked_before_range() {
        let hand = vec![0, 0, 0, 0];
        assert!(matches!(
            validate(&Ruleset::default(), &hand),
            Err(DiceScoreError::InvalidArity {
                expected: 5,
                actual: 4
            })
        ));
    }
}
