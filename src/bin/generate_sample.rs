use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One gym session.
struct Session {
    age: i64,
    gender: &'static str,
    workout: &'static str,
    duration_h: f64,
    calories: Option<f64>,
}

/// `(workout type, kcal per hour)`
const WORKOUTS: [(&str, f64); 4] = [
    ("Yoga", 600.0),
    ("Cardio", 900.0),
    ("HIIT", 1000.0),
    ("Strength", 750.0),
];

const COLUMNS: [&str; 5] = [
    "Age",
    "Gender",
    "Workout_Type",
    "Session_Duration (hours)",
    "Calories_Burned",
];

fn generate_sessions(n: usize, rng: &mut SimpleRng) -> Vec<Session> {
    (0..n)
        .map(|i| {
            let &(workout, kcal_per_hour) = rng.pick(&WORKOUTS);
            let duration_h = rng.gauss(1.25, 0.35).clamp(0.5, 2.0);
            // Lognormal-ish noise keeps the calorie column right-skewed.
            let factor = rng.gauss(0.0, 0.2).exp();
            let age = rng.gauss(38.0, 12.0).clamp(18.0, 70.0).round() as i64;

            Session {
                age,
                gender: *rng.pick(&["Male", "Female"]),
                workout,
                duration_h: (duration_h * 100.0).round() / 100.0,
                // Every 37th session has no calorie reading.
                calories: (i % 37 != 36).then(|| (kcal_per_hour * duration_h * factor).round()),
            }
        })
        .collect()
}

fn write_csv(path: &Path, sessions: &[Session]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer.write_record(COLUMNS)?;
    for s in sessions {
        writer.write_record([
            s.age.to_string(),
            s.gender.to_string(),
            s.workout.to_string(),
            format!("{:.2}", s.duration_h),
            s.calories.map(|c| c.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &Path, sessions: &[Session]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new(COLUMNS[0], DataType::Int64, false),
        Field::new(COLUMNS[1], DataType::Utf8, false),
        Field::new(COLUMNS[2], DataType::Utf8, false),
        Field::new(COLUMNS[3], DataType::Float64, false),
        Field::new(COLUMNS[4], DataType::Float64, true),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(sessions.iter().map(|s| s.age))),
        Arc::new(StringArray::from_iter_values(sessions.iter().map(|s| s.gender))),
        Arc::new(StringArray::from_iter_values(sessions.iter().map(|s| s.workout))),
        Arc::new(Float64Array::from_iter_values(sessions.iter().map(|s| s.duration_h))),
        Arc::new(Float64Array::from_iter(sessions.iter().map(|s| s.calories))),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Final_data.csv".to_string());
    let output_path = Path::new(&output);

    let mut rng = SimpleRng::new(42);
    let sessions = generate_sessions(973, &mut rng);

    match output_path.extension().and_then(|e| e.to_str()) {
        Some("csv") => write_csv(output_path, &sessions)?,
        Some("parquet") | Some("pq") => write_parquet(output_path, &sessions)?,
        _ => bail!("Output must end in .csv or .parquet: {output}"),
    }

    println!("Wrote {} sessions to {output}", sessions.len());
    Ok(())
}
