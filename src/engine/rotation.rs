// ============================================================================
// Micro-Rotation
// One CORDIC stage: shift-and-add rotation by +/- atan(2^-stage)
// ============================================================================
//
// A plain rotation by `a` is
//     x' = x cos(a) - y sin(a)
//     y' = x sin(a) + y cos(a)
// Dropping the 1/cos(a) factor leaves x - y tan(a) and x tan(a) + y; that
// length growth is the CORDIC gain, compensated in the starting vector.
// With tan(a) = 2^-stage the multiplication becomes an arithmetic shift.

use super::angle_table::AngleTable;
use super::errors::{CordicError, CordicResult};
use crate::domain::{Direction, OverflowMode, RotationState, Vector};

/// Rotate `state` by the micro-angle of `stage`.
///
/// A non-negative residual turns the vector anti-clockwise and subtracts the
/// table angle; a negative one turns it clockwise and adds it back.
///
/// # Errors
/// - `StageOutOfRange` if `stage` is past the end of `table`
/// - `Numeric(PrecisionOverflow)` under `OverflowMode::Checked`
pub fn rotate<const N: usize>(
    table: &AngleTable<N>,
    state: &RotationState<N>,
    stage: usize,
    mode: OverflowMode,
) -> CordicResult<(RotationState<N>, Direction)> {
    let delta = table.get(stage)?;
    let bits = u32::try_from(stage).map_err(|_| CordicError::StageOutOfRange {
        stage,
        table_len: table.len(),
    })?;

    let Vector { real, imag } = state.vector;
    let shifted_imag = imag.shr(bits);
    let shifted_real = real.shr(bits);

    let direction = Direction::for_residual(&state.angle);
    let rotated = match direction {
        Direction::AntiClockwise => RotationState::new(
            Vector::new(
                mode.sub(real, shifted_imag)?,
                mode.add(imag, shifted_real)?,
            ),
            mode.sub(state.angle, delta)?,
        ),
        Direction::Clockwise => RotationState::new(
            Vector::new(
                mode.add(real, shifted_imag)?,
                mode.sub(imag, shifted_real)?,
            ),
            mode.add(state.angle, delta)?,
        ),
    };

    Ok((rotated, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Bcd, NumericError};

    type B24 = Bcd<24>;

    fn start(angle: &str) -> RotationState<24> {
        RotationState::new(Vector::gain_compensated(), B24::load(angle))
    }

    #[test]
    fn test_first_stage_anticlockwise() {
        let table = AngleTable::build(75);
        let state = start("0.52359877559829887307710723054658381403286156656251");

        let (next, direction) = rotate(&table, &state, 0, OverflowMode::Wrapping).unwrap();

        assert_eq!(direction, Direction::AntiClockwise);
        assert_eq!(next.angle.to_string(), "-0.2617993877991494365385");
        assert_eq!(next.vector.real.to_string(), "0.6072529350088812561694");
        assert_eq!(next.vector.imag.to_string(), "0.6072529350088812561694");
    }

    #[test]
    fn test_second_stage_clockwise() {
        let table = AngleTable::build(75);
        let state = start("0.52359877559829887307710723054658381403286156656251");
        let (first, _) = rotate(&table, &state, 0, OverflowMode::Wrapping).unwrap();

        let (second, direction) = rotate(&table, &first, 1, OverflowMode::Wrapping).unwrap();

        assert_eq!(direction, Direction::Clockwise);
        assert_eq!(second.angle.to_string(), "0.2018482212016566796757");
        assert_eq!(second.vector.real.to_string(), "0.9108794025133218842541");
        assert_eq!(second.vector.imag.to_string(), "0.3036264675044406280847");
    }

    #[test]
    fn test_zero_residual_rotates_anticlockwise() {
        let table = AngleTable::build(4);
        let state = RotationState::new(Vector::gain_compensated(), B24::ZERO);

        let (next, direction) = rotate(&table, &state, 3, OverflowMode::Wrapping).unwrap();

        assert_eq!(direction, Direction::AntiClockwise);
        assert_eq!(next.angle, B24::ZERO - table.get(3).unwrap());
        assert!(next.vector.imag > B24::ZERO);
    }

    #[test]
    fn test_inputs_untouched() {
        let table = AngleTable::build(4);
        let state = start("0.5");
        let copy = state;

        let _ = rotate(&table, &state, 2, OverflowMode::Wrapping).unwrap();
        assert_eq!(state, copy);
    }

    #[test]
    fn test_stage_out_of_range() {
        let table = AngleTable::build(4);
        let state = start("0.5");

        assert_eq!(
            rotate(&table, &state, 4, OverflowMode::Wrapping),
            Err(CordicError::StageOutOfRange {
                stage: 4,
                table_len: 4
            })
        );
    }

    #[test]
    fn test_checked_mode_reports_overflow() {
        let table = AngleTable::build(4);
        let state = RotationState::new(
            Vector::new(B24::load("9"), B24::load("9")),
            B24::ZERO,
        );

        assert!(rotate(&table, &state, 0, OverflowMode::Wrapping).is_ok());
        assert_eq!(
            rotate(&table, &state, 0, OverflowMode::Checked),
            Err(CordicError::Numeric(NumericError::PrecisionOverflow))
        );
    }
}
