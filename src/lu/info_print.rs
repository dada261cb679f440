#![allow(non_snake_case)]

use super::{LUFactorizer, LUStatus, Permutation};
use crate::algebra::{FloatT, Matrix, ShapedMatrix};
use crate::io::ConfigurablePrintTarget;
use std::io::Write;

impl<T> ConfigurablePrintTarget for LUFactorizer<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(&format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

const RULE: &str = "---------------------------------------------";

impl<T> LUFactorizer<T>
where
    T: FloatT,
{
    pub(crate) fn print_header(&mut self, A: &Matrix<T>) -> std::io::Result<()> {
        if !self.settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "{RULE}")?;
        writeln!(out, "         gauss-lu v{}  -  LU factorization", crate::VERSION)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "problem:")?;
        writeln!(out, "  dimension = {} x {}", A.nrows(), A.ncols())?;
        writeln!(
            out,
            "  mode      = {}",
            if self.info.pivoted { "P*A = L*U" } else { "A = L*U" }
        )?;
        writeln!(
            out,
            "  method    = {}, precision: {} bit",
            self.info.method,
            _get_precision_string::<T>()
        )?;
        writeln!(out)?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_steps(&mut self) -> std::io::Result<()> {
        if !self.settings.verbose || self.info.steps() == 0 {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "step    row     pivot")?;
        writeln!(out, "{RULE}")?;

        for (k, (&row, &pivot)) in self.info.pivot_rows.iter().zip(&self.info.pivots).enumerate() {
            writeln!(
                out,
                "{:>4}  {:>5}  {}",
                k,
                row,
                expformat!("{:+10.4e}", pivot)
            )?;
        }
        out.flush()?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_factors(
        &mut self,
        P: Option<&Permutation>,
        L: &Matrix<T>,
        U: &Matrix<T>,
    ) -> std::io::Result<()> {
        if !(self.settings.verbose && self.settings.print_factors) {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "{RULE}")?;
        if L.nrows() > self.settings.max_print_dim {
            writeln!(
                out,
                "factors not shown (dimension {} > max_print_dim = {})",
                L.nrows(),
                self.settings.max_print_dim
            )?;
            return std::io::Result::Ok(());
        }

        if let Some(P) = P {
            writeln!(out, "Permutation:\n{P}")?;
        }
        writeln!(out, "L:\n{L}")?;
        write!(out, "U:\n{U}")?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_footer(&mut self) -> std::io::Result<()> {
        if !self.settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        let info = &self.info;

        writeln!(out, "{RULE}")?;
        writeln!(out, "Terminated with status = {}", info.status)?;

        if info.status != LUStatus::InvalidInput {
            writeln!(out, "row swaps = {}", info.swaps)?;
            writeln!(out, "factor time = {:?}", info.factor_time)?;
        }
        out.flush()?;

        std::io::Result::Ok(())
    }
}

fn _get_precision_string<T: FloatT>() -> String {
    (std::mem::size_of::<T>() * 8).to_string()
}

// Rewrite a LowerExp formatted number so that the exponent
// always carries a sign and has at least two digits, e.g.
// "1.5e3" -> "1.5e+03" and "-2.0e-7" -> "-2.0e-07".
fn _exp_str_reformat(thestr: &str) -> String {
    let Some((mantissa, exponent)) = thestr.split_once('e') else {
        return thestr.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent.trim_start_matches('+')),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat("1.5e3"), "1.5e+03");
    assert_eq!(_exp_str_reformat("-2.0e-7"), "-2.0e-07");
    assert_eq!(_exp_str_reformat("+4.0000e123"), "+4.0000e+123");
    assert_eq!(_exp_str_reformat("inf"), "inf");
}
