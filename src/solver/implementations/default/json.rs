#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::hessian::Hessian;
use crate::solver::SolverJSONReadWrite;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

// A struct very similar to the problem data, but containing only
// the data types provided by the user (i.e. no internal types).

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub c: Vec<T>,
    pub h: Option<Matrix<T>>,
    pub a: Matrix<T>,
    pub bl_c: Vec<T>,
    pub bu_c: Vec<T>,
    pub bl_x: Vec<T>,
    pub bu_x: Vec<T>,
    pub x0: Vec<T>,
    pub settings: DefaultSettings<T>,
}

impl<T> SolverJSONReadWrite<T> for DefaultSolver<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let h = match &self.data.hessian {
            Hessian::Zero(_) => None,
            Hessian::Dense(dh) => Some(dh.H.clone()),
            Hessian::Operator(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "operator form Hessian cannot be serialized",
                ));
            }
        };

        let n = self.data.n;
        let mut json_data = JsonProblemData {
            c: self.data.c.clone(),
            h,
            a: self.data.A.clone(),
            bl_c: self.data.bl[n..].to_vec(),
            bu_c: self.data.bu[n..].to_vec(),
            bl_x: self.data.bl[0..n].to_vec(),
            bu_x: self.data.bu[0..n].to_vec(),
            x0: self.data.x0.clone(),
            settings: self.settings.clone(),
        };

        // sanitize to remove values that can't be serialized, i.e. infs
        let infbound = json_data.settings.infinite_bound;
        for b in [
            &mut json_data.bl_c,
            &mut json_data.bu_c,
            &mut json_data.bl_x,
            &mut json_data.bu_x,
        ] {
            b.scalarop(|v| v.clip(-infbound, infbound));
        }
        sanitize_settings(&mut json_data.settings);

        // write to file
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        // read file
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let mut json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        // restore sanitized settings to their (likely) original values
        desanitize_settings(&mut json_data.settings);

        // create a solver object
        let solver = Self::new(
            &json_data.c,
            json_data.h.as_ref(),
            &json_data.a,
            &json_data.bl_c,
            &json_data.bu_c,
            &json_data.bl_x,
            &json_data.bu_x,
            Some(&json_data.x0),
            json_data.settings,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

        Ok(solver)
    }
}

fn sanitize_settings<T: FloatT>(settings: &mut DefaultSettings<T>) {
    if settings.time_limit == f64::INFINITY {
        settings.time_limit = f64::MAX;
    }
}

fn desanitize_settings<T: FloatT>(settings: &mut DefaultSettings<T>) {
    if settings.time_limit == f64::MAX {
        settings.time_limit = f64::INFINITY;
    }
}

#[test]
fn test_json_io() {
    use crate::solver::ActiveSetSolver;
    use std::io::{Seek, SeekFrom};

    let c = [1.0, 1.0];
    let A = Matrix::from(&[[1.0, 1.0]]);
    let (bl_c, bu_c) = ([1.0], [1.0]);
    let (bl_x, bu_x) = ([0.0, 0.0], [f64::INFINITY, f64::INFINITY]);

    let settings = crate::solver::DefaultSettingsBuilder::default()
        .verbosity(crate::solver::Verbosity::Silent)
        .build()
        .unwrap();

    let mut solver = crate::solver::DefaultSolver::<f64>::new(
        &c, None, &A, &bl_c, &bu_c, &bl_x, &bu_x, None, settings,
    )
    .unwrap();
    solver.solve();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = crate::solver::DefaultSolver::<f64>::read_from_file(&mut file).unwrap();
    solver2.solve();
    assert_eq!(solver.solution.x, solver2.solution.x);
}
