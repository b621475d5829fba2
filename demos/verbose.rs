#![allow(non_snake_case)]
//! Print every tableau the solver visits on a small two-phase problem.

use lp_simplex::prelude::*;
use ndarray::prelude::*;

fn main() {
    // Thie & Keough, with a free fourth variable and a negative right hand side, so phase one is needed.
    let c = array![-3., 2., 1., -1.];
    let A_ub = array![[4., -1., 0., 1.], [7., -8., -1., 0.]];
    let b_ub = array![6., -7.];
    let A_eq = array![[1., 1., 0., 4.]];
    let b_eq = array![12.];
    let mut bounds = [Bound::default(); 4];
    bounds[3] = Bound::free();

    let problem = Problem::target(&c)
        .ub(&A_ub, &b_ub)
        .eq(&A_eq, &b_eq)
        .bounds(&bounds)
        .build()
        .unwrap();

    let solver = Simplex::custom().disp(true).build().unwrap();
    let mut observer = VerboseObserver::stdout();
    let solution = solver.solve_with_observer(&problem, &mut observer).unwrap();

    println!("x = {}", solution.x());

    let mut terse = TerseObserver::stdout();
    solver.solve_with_observer(&problem, &mut terse).unwrap();
}
