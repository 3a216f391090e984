use super::EventLog;
use crate::{error::Error, prelude::Real, Result};
use getset::{CopyGetters, Getters};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::io;

/// Header of the rendered trajectory table.
pub const CSV_HEADER: &str = "time,S,I,R";

/// A single row of the output table.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRow {
    pub time: Real,
    #[serde(rename = "S")]
    pub susceptible: usize,
    #[serde(rename = "I")]
    pub infectious: usize,
    #[serde(rename = "R")]
    pub recovered: usize,
}

/// Time-ordered table of compartment counts. The first row is the initial
/// state and the last one is the event where the number of infectious
/// individuals reaches zero.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Trajectory {
    #[getset(get = "pub")]
    rows: Vec<TrajectoryRow>,

    #[getset(get_copy = "pub")]
    population: usize,
}

impl Trajectory {
    /// Package the raw event log, deriving R = N - S - I for each row.
    ///
    /// Fails if any row has more susceptible and infectious individuals than
    /// the population size.
    pub fn assemble(log: &EventLog, population: usize) -> Result<Self> {
        let mut rows = Vec::with_capacity(log.len());
        for (row, (time, susceptible, infectious)) in log.iter().enumerate() {
            let count = susceptible + infectious;
            if count > population {
                return Err(Error::Conservation {
                    row,
                    count,
                    population,
                });
            }
            rows.push(TrajectoryRow {
                time,
                susceptible,
                infectious,
                recovered: population - count,
            });
        }
        Ok(Trajectory { rows, population })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectoryRow> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&TrajectoryRow> {
        self.rows.last()
    }

    /// Time of the last event.
    pub fn duration(&self) -> Real {
        self.last().map(|r| r.time).unwrap_or(0.0)
    }

    /// Row with the largest number of infectious individuals. Ties resolve
    /// to the earliest row.
    pub fn peak(&self) -> Option<&TrajectoryRow> {
        self.rows.iter().fold(None, |best: Option<&TrajectoryRow>, row| match best {
            Some(b) if b.infectious >= row.infectious => Some(b),
            _ => Some(row),
        })
    }

    /// Number of individuals infected at some point, read back from the last
    /// row. Individuals that started in R are not counted.
    pub fn ever_infected(&self, initially_recovered: usize) -> Option<usize> {
        let last = self.last()?;
        (self.population - last.susceptible).checked_sub(initially_recovered)
    }

    pub fn times(&self) -> Vec<Real> {
        self.rows.iter().map(|r| r.time).collect()
    }

    pub fn susceptible(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.susceptible).collect()
    }

    pub fn infectious(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.infectious).collect()
    }

    pub fn recovered(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.recovered).collect()
    }

    /// Convert to a (rows x 4) array with columns time, S, I, R.
    pub fn to_array(&self) -> Array2<Real> {
        let mut arr = Array2::zeros((self.rows.len(), 4));
        for (i, row) in self.rows.iter().enumerate() {
            arr[[i, 0]] = row.time;
            arr[[i, 1]] = row.susceptible as Real;
            arr[[i, 2]] = row.infectious as Real;
            arr[[i, 3]] = row.recovered as Real;
        }
        return arr;
    }

    /// Write the table as CSV, with a `time,S,I,R` header.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        if self.rows.is_empty() {
            wtr.write_record(CSV_HEADER.split(','))?;
        }
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render the table as a CSV string.
    pub fn render_csv(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> EventLog {
        let mut log = EventLog::default();
        log.record(0.0, 2, 1);
        log.record(0.5, 1, 2);
        log.record(1.5, 1, 1);
        log.record(2.0, 1, 0);
        log
    }

    #[test]
    fn derives_recovered() {
        let traj = Trajectory::assemble(&log(), 4).unwrap();
        assert_eq!(traj.len(), 4);
        assert_eq!(traj.recovered(), vec![1, 1, 2, 3]);
        assert!(traj
            .rows()
            .iter()
            .all(|r| r.susceptible + r.infectious + r.recovered == 4));
        assert_eq!(traj.ever_infected(1), Some(2));
        assert_eq!(traj.duration(), 2.0);
        assert_eq!(traj.peak().map(|r| r.time), Some(0.5));
    }

    #[test]
    fn rejects_overfull_rows() {
        match Trajectory::assemble(&log(), 2) {
            Err(Error::Conservation { row, .. }) => assert_eq!(row, 0),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn renders_csv() {
        let traj = Trajectory::assemble(&log(), 3).unwrap();
        let csv = traj.render_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.next(), Some("0.0,2,1,0"));
        assert_eq!(lines.next(), Some("0.5,1,2,0"));
        assert_eq!(csv.lines().count(), 5);
    }

    #[test]
    fn renders_empty_table() {
        let traj = Trajectory::assemble(&EventLog::default(), 3).unwrap();
        assert_eq!(traj.render_csv().unwrap().trim(), CSV_HEADER);
        assert_eq!(traj.ever_infected(0), None);
    }

    #[test]
    fn converts_to_array() {
        let arr = Trajectory::assemble(&log(), 3).unwrap().to_array();
        assert_eq!(arr.shape(), &[4, 4]);
        assert_eq!(arr[[1, 0]], 0.5);
        assert_eq!(arr[[3, 3]], 2.0);
    }
}
