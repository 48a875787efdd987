use anyhow::Result;
use clap::{value_parser, Arg, Command};
use cyclops::{Cyclops, CyclopsConfig};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("Cyclops Demo")
        .version("0.1.0")
        .about("Cyclops 모델 생성, 멀티핫 인코딩/디코딩 왕복, 순방향 호출 데모")
        .arg(
            Arg::new("input-dim")
                .long("n")
                .value_name("N")
                .help("입력 차원 n")
                .value_parser(value_parser!(i64))
                .default_value("5"),
        )
        .arg(
            Arg::new("multihot-dim")
                .long("m")
                .value_name("M")
                .help("멀티핫 그룹 수 m")
                .value_parser(value_parser!(i64))
                .default_value("3"),
        )
        .arg(
            Arg::new("hypersphere-dim")
                .long("c")
                .value_name("C")
                .help("초구 차원 c")
                .value_parser(value_parser!(i64))
                .default_value("2"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_name("SEED")
                .help("난수 시드")
                .value_parser(value_parser!(u64))
                .default_value("42"),
        )
        .get_matches();

    let n = *matches.get_one::<i64>("input-dim").unwrap_or(&5);
    let m = *matches.get_one::<i64>("multihot-dim").unwrap_or(&3);
    let c = *matches.get_one::<i64>("hypersphere-dim").unwrap_or(&2);
    let seed = *matches.get_one::<u64>("seed").unwrap_or(&42);

    let config = CyclopsConfig::new(n).with_multihot_dim(m).with_hypersphere_dim(c);
    let mut rng = StdRng::seed_from_u64(seed);
    let model = Cyclops::from_config(&config, &mut rng)?;

    println!("=== Cyclops 데모 ===");
    println!("모델: {}", model);

    // 문서의 예시 입력을 n에 맞게 반복/절단
    let sample = [0.726f32, 0.326, 0.307, 0.549, 0.789];
    let x: Array1<f32> = (0..model.input_dim()).map(|i| sample[i % sample.len()]).collect();
    let h: Vec<i32> = (0..model.multihot_dim()).map(|i| ((i + 1) % 2) as i32).collect();

    let encoded = model.encode(&x, &h, false)?;
    let decoded = model.decode(&encoded, &h, false)?;
    let max_error = x
        .iter()
        .zip(decoded.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);

    println!("입력:        {}", x);
    println!("지시자:      {:?}", h);
    println!("인코딩:      {}", encoded);
    println!("디코딩:      {}", decoded);
    println!("왕복 최대 오차: {:.3e}", max_error);

    let output = model.forward(&x, Some(h.as_slice()))?;
    println!("순방향 출력: {}", output);

    Ok(())
}
