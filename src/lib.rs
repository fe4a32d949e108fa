//!  __Dunlin.rs__ is a Rust implementation of a dense active-set solver for convex quadratic and linear programs.  Dunlin solves the following problem:
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T H x + c^T x\\\\\[2ex\]
//!  \text{subject to} & b_{lc} \le Ax \le b_{uc} \\\\\[1ex\]
//!         & b_{lx} \le x \le b_{ux}
//!  \end{array}
//! $$
//!
//! with decision variable
//! $x \in \mathbb{R}^n$
//! and data
//! $H=H^\top \succeq 0$ (optional),
//! $c \in \mathbb{R}^n$,
//! $A \in \mathbb{R}^{m \times n}$ dense, and two-sided bounds
//! $b_{lc}, b_{uc} \in \mathbb{R}^m$ on the constraint rows and
//! $b_{lx}, b_{ux} \in \mathbb{R}^n$ on the variables.
//! Bound entries at or beyond the configured infinite threshold are treated
//! as absent in that direction.  When $H$ is absent the problem is a linear
//! program and is solved by the same engine.
//!
//! ## Features
//!
//! * __Two-phase primal active set__: an initial feasibility-restoration phase minimizes the sum of infeasibilities; the optimality phase updates the working set using Lagrange-multiplier sign tests until optimality, infeasibility or unboundedness is established.
//!
//! * __Status, not exceptions__: infeasible, unbounded, iteration-limit and numerical-failure outcomes are terminal statuses on the returned solution, so batch callers can continue after any single solve.
//!
//! * __Hessian strategies__: the quadratic term may be given as a dense matrix or as a Hessian-vector product operator, selected at construction time.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod solver;
