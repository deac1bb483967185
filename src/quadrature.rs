use pyo3::prelude::*;

use crate::error::{Error, Result};
use crate::matrix::matrix::Element;

// Integrate a sampled function over [lower, upper] split into equal intervals

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RectangleRule {
    #[default]
    Left,
    Midpoint,
    Right,
}

struct Grid<T> {
    lower: T,
    upper: T,
    step: T,
    intervals: usize,
}

impl<T: Element> Grid<T> {
    fn new(lower: T, upper: T, intervals: usize) -> Result<Self> {
        if intervals == 0 {
            return Err(Error::InvalidIntervals);
        }
        let count = T::from(intervals).ok_or(Error::InvalidIntervals)?;

        Ok(Grid {
            lower,
            upper,
            step: (upper - lower) / count,
            intervals,
        })
    }

    /// `intervals + 1` sample points; the last one is exactly `upper`
    fn points(&self) -> impl Iterator<Item = T> + '_ {
        (0..=self.intervals).scan(T::zero(), move |index, i| {
            let x = if i == self.intervals {
                self.upper
            } else {
                self.lower + self.step * *index
            };
            *index = *index + T::one();
            Some(x)
        })
    }

    fn midpoints(&self) -> impl Iterator<Item = T> + '_ {
        let half = T::one() / (T::one() + T::one());
        (0..self.intervals).scan(half, move |index, _| {
            let x = self.lower + self.step * *index;
            *index = *index + T::one();
            Some(x)
        })
    }
}

pub fn rectangle<T: Element>(
    mut function: impl FnMut(T) -> T,
    lower: T,
    upper: T,
    intervals: usize,
    rule: RectangleRule,
) -> Result<T> {
    let grid = Grid::new(lower, upper, intervals)?;

    let heights: T = match rule {
        RectangleRule::Left => grid.points().take(intervals).map(&mut function).sum(),
        RectangleRule::Right => grid.points().skip(1).map(&mut function).sum(),
        RectangleRule::Midpoint => grid.midpoints().map(&mut function).sum(),
    };
    Ok(heights * grid.step)
}

pub fn trapezoid<T: Element>(
    mut function: impl FnMut(T) -> T,
    lower: T,
    upper: T,
    intervals: usize,
) -> Result<T> {
    let grid = Grid::new(lower, upper, intervals)?;
    let half = T::one() / (T::one() + T::one());

    let mut points = grid.points();
    let mut left = match points.next() {
        Some(x) => function(x),
        None => return Err(Error::InvalidIntervals),
    };

    // each sample is shared by two neighbouring trapeziums and evaluated once
    let mut total = T::zero();
    for x in points {
        let right = function(x);
        total = total + half * (left + right) * grid.step;
        left = right;
    }
    Ok(total)
}

/// Composite Simpson 1/3 rule; `intervals` must be even.
pub fn simpson<T: Element>(
    mut function: impl FnMut(T) -> T,
    lower: T,
    upper: T,
    intervals: usize,
) -> Result<T> {
    if intervals % 2 != 0 {
        return Err(Error::OddIntervals { intervals });
    }
    let grid = Grid::new(lower, upper, intervals)?;

    let two = T::one() + T::one();
    let four = two + two;
    let three = two + T::one();

    let total = grid
        .points()
        .enumerate()
        .map(|(i, x)| {
            let weight = if i == 0 || i == intervals {
                T::one()
            } else if i % 2 == 1 {
                four
            } else {
                two
            };
            weight * function(x)
        })
        .fold(T::zero(), |acc, v| acc + v);

    Ok(total * grid.step / three)
}

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

// Runs `integrate` over a Python callable. The first exception raised by the
// callable stops further calls and is returned in place of the result.
fn with_py_function<R>(
    py: Python<'_>,
    function: &PyObject,
    integrate: impl FnOnce(&mut dyn FnMut(f64) -> f64) -> Result<R>,
) -> PyResult<R> {
    let mut failure: Option<PyErr> = None;

    let result = integrate(&mut |x: f64| {
        if failure.is_some() {
            return f64::NAN;
        }
        match function
            .call1(py, (x,))
            .and_then(|value| value.extract::<f64>(py))
        {
            Ok(value) => value,
            Err(error) => {
                failure = Some(error);
                f64::NAN
            }
        }
    });

    if let Some(error) = failure {
        return Err(error);
    }
    Ok(result?)
}

#[pyfunction]
#[pyo3(name = "rectangle_integration", signature = (function, lower, upper, intervals, rule = "left"))]
pub fn py_rectangle_integration(
    py: Python,
    function: PyObject,
    lower: f64,
    upper: f64,
    intervals: usize,
    rule: &str,
) -> PyResult<f64> {
    let rule = match rule {
        "left" => RectangleRule::Left,
        "midpoint" => RectangleRule::Midpoint,
        "right" => RectangleRule::Right,
        _ => {
            return Err(pyo3::exceptions::PyValueError::new_err(
                "Rule must be one of left|midpoint|right",
            ))
        }
    };
    with_py_function(py, &function, |f| {
        rectangle(f, lower, upper, intervals, rule)
    })
}

#[pyfunction]
#[pyo3(name = "trapezoid_integration")]
pub fn py_trapezoid_integration(
    py: Python,
    function: PyObject,
    lower: f64,
    upper: f64,
    intervals: usize,
) -> PyResult<f64> {
    with_py_function(py, &function, |f| trapezoid(f, lower, upper, intervals))
}

#[pyfunction]
#[pyo3(name = "simpson_integration")]
pub fn py_simpson_integration(
    py: Python,
    function: PyObject,
    lower: f64,
    upper: f64,
    intervals: usize,
) -> PyResult<f64> {
    with_py_function(py, &function, |f| simpson(f, lower, upper, intervals))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_rectangle() {
        let f = |x: f64| x;
        assert_approx_eq!(rectangle(f, 0.0, 1.0, 4, RectangleRule::Left).unwrap(), 0.375);
        assert_approx_eq!(rectangle(f, 0.0, 1.0, 4, RectangleRule::Right).unwrap(), 0.625);
        assert_approx_eq!(rectangle(f, 0.0, 1.0, 4, RectangleRule::Midpoint).unwrap(), 0.5);

        let square = |x: f64| x * x;
        assert_approx_eq!(
            rectangle(square, 0.0, 3.0, 3000, RectangleRule::Midpoint).unwrap(),
            9.0,
            1e-5
        );
    }

    #[test]
    fn test_trapezoid() {
        // exact for linear functions
        assert_approx_eq!(trapezoid(|x: f64| 2.0 * x + 1.0, 0.0, 2.0, 1).unwrap(), 6.0);
        assert_approx_eq!(trapezoid(|x: f64| x * x, 0.0, 1.0, 2).unwrap(), 0.375);
        assert_approx_eq!(
            trapezoid(f64::sin, 0.0, std::f64::consts::PI, 1000).unwrap(),
            2.0,
            1e-5
        );

        // reversed bounds flip the sign
        assert_approx_eq!(trapezoid(|x: f64| x, 1.0, 0.0, 10).unwrap(), -0.5);
    }

    #[test]
    fn test_trapezoid_evaluates_each_point_once() {
        let mut calls = 0;
        trapezoid(
            |x: f64| {
                calls += 1;
                x
            },
            0.0,
            1.0,
            8,
        )
        .unwrap();
        assert_eq!(calls, 9);
    }

    #[test]
    fn test_simpson() {
        // exact for cubics
        assert_approx_eq!(simpson(|x: f64| x * x * x, 0.0, 2.0, 2).unwrap(), 4.0);
        assert_approx_eq!(simpson(f64::exp, 0.0, 1.0, 100).unwrap(), 1f64.exp() - 1.0);
        assert_approx_eq!(simpson(|x: f32| x * x, 0.0f32, 3.0, 6).unwrap(), 9.0f32, 1e-4);
    }

    #[test]
    fn test_invalid_intervals() {
        let f = |x: f64| x;
        assert_eq!(trapezoid(f, 0.0, 1.0, 0), Err(Error::InvalidIntervals));
        assert_eq!(
            rectangle(f, 0.0, 1.0, 0, RectangleRule::Left),
            Err(Error::InvalidIntervals)
        );
        assert_eq!(simpson(f, 0.0, 1.0, 0), Err(Error::InvalidIntervals));
        assert_eq!(
            simpson(f, 0.0, 1.0, 3),
            Err(Error::OddIntervals { intervals: 3 })
        );
    }
}
