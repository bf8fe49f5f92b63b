use anyhow::{Context, Result};

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let areas = ["Operaciones", "IT", "Finanzas", "Ventas"];
    let owners = ["Ana", "Leo", "Marta", "Iván", ""];
    let statuses = ["Abierta", "En curso", "Cerrada"];

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating sample CSV")?;
    writer.write_record(["Tarea", "Área", "Responsable", "Estado", "Horas"])?;

    let mut written = 0;
    for task in 1..=40 {
        // Every 9th row is blank, the way exported sheets often end up.
        if task % 9 == 0 {
            writer.write_record(["", "", "", "", ""])?;
            continue;
        }

        let hours = (rng.next_u64() % 40 + 1).to_string();
        writer.write_record([
            format!("T-{task:03}").as_str(),
            rng.pick(&areas),
            rng.pick(&owners),
            rng.pick(&statuses),
            hours.as_str(),
        ])?;
        written += 1;
    }
    writer.flush().context("flushing sample CSV")?;

    println!("Wrote {written} tasks (plus blank rows) to {output_path}");
    Ok(())
}
