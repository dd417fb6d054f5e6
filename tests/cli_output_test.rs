use std::process::Command;

#[test]
fn binary_prints_exactly_one_summary_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_gauss_walk_bench"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run benchmark binary");
    assert!(output.status.success(), "benchmark exited with {}", output.status);

    let stdout = String::from_utf8(output.stdout).expect("stdout is not utf-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout should hold one line, got {:?}", stdout);

    // The mean time was <x>ms, the min was <y>ms
    let line = lines[0];
    let rest = line
        .strip_prefix("The mean time was ")
        .expect("unexpected prefix");
    let (mean, rest) = rest.split_once("ms, the min was ").expect("bad separator");
    let min = rest.strip_suffix("ms").expect("missing trailing unit");

    let mean: f64 = mean.parse().expect("mean is not a number");
    let min: f64 = min.parse().expect("min is not a number");
    assert!(min >= 0.0);
    assert!(min <= mean);
}
