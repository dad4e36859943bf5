use crate::direction::Direction;

/// The two capabilities a solver needs from the world it navigates.
///
/// Both methods are only ever called with one of the four real directions.
/// `step` is invoked after the solver has already updated its own position;
/// implementations use it for side effects (rendering, logging, delays).
pub trait Sensor {
    /// Is the edge leading out of the agent's cell in `direction` open?
    fn probe(&mut self, direction: Direction) -> bool;

    /// The agent crossed the edge in `direction`.
    fn step(&mut self, direction: Direction);
}

impl<S: Sensor + ?Sized> Sensor for &mut S {
    fn probe(&mut self, direction: Direction) -> bool {
        (**self).probe(direction)
    }

    fn step(&mut self, direction: Direction) {
        (**self).step(direction)
    }
}

/// Sensor built from a pair of closures
pub struct FnSensor<P, M> {
    probe_fn: P,
    step_fn: M,
}

impl<P, M> FnSensor<P, M>
where
    P: FnMut(Direction) -> bool,
    M: FnMut(Direction),
{
    pub fn new(probe_fn: P, step_fn: M) -> Self {
        FnSensor { probe_fn, step_fn }
    }
}

impl<P, M> Sensor for FnSensor<P, M>
where
    P: FnMut(Direction) -> bool,
    M: FnMut(Direction),
{
    fn probe(&mut self, direction: Direction) -> bool {
        (self.probe_fn)(direction)
    }

    fn step(&mut self, direction: Direction) {
        (self.step_fn)(direction)
    }
}
