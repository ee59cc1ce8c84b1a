use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use nalgebra::DMatrix;

use crate::state_space::StateSpace;

/// Write one labeled matrix block in CSV form.
pub fn write_matrix_csv<W: Write>(
    writer: &mut BufWriter<W>,
    matrix: &DMatrix<f64>,
    title: &str,
    row_labels: &[&str],
    col_labels: &[&str],
) -> io::Result<()> {
    if row_labels.len() != matrix.nrows() || col_labels.len() != matrix.ncols() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "label counts ({}, {}) do not match matrix shape {}x{}",
                row_labels.len(),
                col_labels.len(),
                matrix.nrows(),
                matrix.ncols()
            ),
        ));
    }

    writeln!(writer, "{}", title)?;
    for label in col_labels {
        write!(writer, ",{}", label)?;
    }
    writeln!(writer)?;

    for i in 0..matrix.nrows() {
        write!(writer, "{}", row_labels[i])?;
        for j in 0..matrix.ncols() {
            write!(writer, ",{:.8e}", matrix[(i, j)])?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Save all four system matrices of `model` to a labeled CSV file.
pub fn save_state_space_csv(
    path: impl AsRef<Path>,
    model: &StateSpace,
    state_labels: &[&str],
    input_labels: &[&str],
    output_labels: &[&str],
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_matrix_csv(
        &mut writer,
        model.a(),
        "A Matrix (dx/dt = Ax + Bu)",
        state_labels,
        state_labels,
    )?;
    write_matrix_csv(
        &mut writer,
        model.b(),
        "B Matrix (dx/dt = Ax + Bu)",
        state_labels,
        input_labels,
    )?;
    write_matrix_csv(
        &mut writer,
        model.c(),
        "C Matrix (y = Cx + Du)",
        output_labels,
        state_labels,
    )?;
    write_matrix_csv(
        &mut writer,
        model.d(),
        "D Matrix (y = Cx + Du)",
        output_labels,
        input_labels,
    )?;

    writer.flush()?;
    Ok(())
}
