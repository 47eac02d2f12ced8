use std::time::Instant;

use wavefield::config::GridConfig;
use wavefield::mesh::SurfaceMesh;
use wavefield::wave::WavePreset;

const PASSES: u32 = 600;

fn run_stress(subdivisions: u32) {
    let grid = GridConfig::new(10.0, 10.0, subdivisions, subdivisions);
    let mut mesh = SurfaceMesh::new(&grid).expect("valid grid");

    let start = Instant::now();
    for step in 0..PASSES {
        mesh.displace(&WavePreset::HERO, step as f32 / 60.0);
        mesh.recompute_normals();
        let _ = mesh.vertices();
    }
    let elapsed = start.elapsed().as_secs_f64();

    let vertices = mesh.vertex_count();
    println!(
        "  {:>4}x{:<4} {:>9} vertices  {:>8.1} passes/s  {:>7.3} ms/pass",
        subdivisions,
        subdivisions,
        vertices,
        PASSES as f64 / elapsed,
        elapsed * 1000.0 / PASSES as f64,
    );
}

fn main() {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║        WAVEFIELD CPU STRESS - displace + normals           ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    for subdivisions in [50u32, 60, 120, 240, 480] {
        println!(
            "{:=<60}\n{} subdivisions  [{}]",
            "",
            subdivisions,
            chrono::Local::now().format("%H:%M:%S")
        );
        run_stress(subdivisions);
    }

    println!("\ndone; a 60Hz frame budget is ~16.7 ms, anything under that is realtime");
}
