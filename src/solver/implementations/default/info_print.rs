use super::*;
use crate::algebra::*;
use crate::solver::core::hessian::QuadraticForm;
use crate::solver::core::traits::InfoPrint;
use crate::solver::core::Phase;
use std::time::Duration;

impl<T> InfoPrint<T> for DefaultInfo<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type SE = DefaultSettings<T>;

    fn print_configuration(&self, settings: &DefaultSettings<T>, data: &DefaultProblemData<T>) {
        if !settings.verbosity.summary() {
            return;
        }

        println!("problem:");
        println!("  variables     = {}", data.n);
        println!("  constraints   = {}", data.m);
        let objective = {
            if data.hessian.is_zero() {
                "linear"
            } else {
                "quadratic"
            }
        };
        println!("  objective     = {}", objective);
        println!();

        print_settings(settings);
        println!();
    }

    fn print_status_header(&self, settings: &DefaultSettings<T>) {
        if !settings.verbosity.iteration() {
            return;
        }

        //print a subheader for the iterations info
        println!("iter    pcost        infeas      nact   step      phase");
        println!("------------------------------------------------------------");
    }

    fn print_status(&self, settings: &DefaultSettings<T>) {
        if !settings.verbosity.iteration() {
            return;
        }

        let phase = match self.phase {
            Phase::Feasibility => "feasibility",
            Phase::Optimality => "optimality",
        };

        println!(
            "{:>3}  {:+11.4e}  {:10.2e}  {:>4}  {:8.2e}  {}",
            self.iterations, self.cost_primal, self.infeasibility, self.n_active,
            self.step_length, phase
        );
    }

    fn print_footer(&self, settings: &DefaultSettings<T>) {
        if !settings.verbosity.summary() {
            return;
        }

        if settings.verbosity.iteration() {
            println!("------------------------------------------------------------");
        }

        println!("Terminated with status = {}", self.status);
        println!("iterations = {}", self.iterations);
        println!(
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        );
    }
}

fn print_settings<T: FloatT>(settings: &DefaultSettings<T>) {
    let set = settings;

    println!("settings:");

    let max_iter_str = {
        if set.max_iter == 0 {
            "auto".to_string()
        } else {
            format!("{}", set.max_iter)
        }
    };
    let time_lim_str = {
        if set.time_limit.is_infinite() {
            "Inf".to_string()
        } else {
            format!("{:?}", set.time_limit)
        }
    };
    println!(
        "  max iter = {}, time limit = {}",
        max_iter_str, time_lim_str
    );

    println!(
        "  tol_feas = {:.1e}, tol_optimality = {:.1e}, tol_rank = {:.1e}",
        set.tol_feas, set.tol_optimality, set.tol_rank
    );

    println!(
        "  infinite bound = {:.1e}, static reg = {:.1e}",
        set.infinite_bound, set.static_regularization_constant
    );
}
