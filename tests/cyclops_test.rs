//! 모델 생성부터 순방향 호출까지의 통합 테스트

use anyhow::Result;
use approx::assert_abs_diff_eq;
use cyclops::{
    ConstructionError, Cyclops, CyclopsConfig, CyclopsError, Dense, FunctionError,
};
use ndarray::{array, Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// m = 0, 압축은 앞 두 좌표 선택, 확장은 [a, b, a + b + 0.5]
fn projection_model() -> Result<Cyclops> {
    let compress = Dense::from_parts(array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], Array1::zeros(2))?;
    let expand = Dense::from_parts(array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]], array![0.0, 0.0, 0.5])?;

    Ok(Cyclops::from_parameters(
        Array2::zeros((3, 0)),
        Array2::zeros((3, 0)),
        Array2::<f32>::zeros((3, 0)),
        compress,
        expand,
    )?)
}

#[test]
fn 문서_예시_인코딩_디코딩_왕복() -> Result<()> {
    let model = Cyclops::from_dimensions(5, 3, 2, &mut StdRng::seed_from_u64(5))?;
    let x = array![0.726f32, 0.326, 0.307, 0.549, 0.789];
    let h = [1, 0, 1];

    let y = model.encode(&x, &h, false)?;
    let back = model.decode(&y, &h, false)?;
    assert_eq!(back.len(), 5);
    for (a, b) in back.iter().zip(x.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn 순방향_합성_값() -> Result<()> {
    let model = projection_model()?;

    let y = model.forward(&array![3.0f32, 4.0, 100.0], None)?;
    let expected = [0.6f32, 0.8, 1.9];
    assert_eq!(y.len(), 3);
    for (a, b) in y.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-6);
    }

    // 빈 지시자를 명시해도 같다
    assert_eq!(model.forward(&array![3.0f32, 4.0, 100.0], Some(&[][..]))?, y);
    Ok(())
}

#[test]
fn 순방향_출력_길이는_항상_n() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(77);
    for (n, m, c) in [(3i64, 0i64, 2i64), (5, 3, 2), (8, 2, 4), (10, 1, 9)] {
        let model = Cyclops::from_dimensions(n, m, c, &mut rng)?;
        let x: Array1<f32> = (0..n).map(|i| 0.1 * (i + 1) as f32).collect();
        let h: Vec<i32> = (0..m).map(|i| (i % 2) as i32).collect();

        let y = model.forward(&x, Some(h.as_slice()))?;
        assert_eq!(y.len(), n as usize);
        assert_eq!(model.forward_unchecked(&x, Some(h.as_slice()))?, y);
    }
    Ok(())
}

#[test]
fn 지시자_없이_호출은_m이_0일_때만() -> Result<()> {
    let model = Cyclops::from_dimensions(5, 3, 2, &mut StdRng::seed_from_u64(3))?;
    let x = Array1::<f32>::ones(5);

    assert_eq!(
        model.forward(&x, None),
        Err(FunctionError::MultihotDimensionMismatch { actual: 0, expected: 3 })
    );
    assert_eq!(
        model.forward(&Array1::ones(4), Some(&[1, 0, 0][..])),
        Err(FunctionError::InputDimensionMismatch { actual: 4, expected: 5 })
    );
    Ok(())
}

#[test]
fn 파이프라인_중간_실패는_호출_전체를_중단() -> Result<()> {
    let model = projection_model()?;

    // 압축 결과가 영벡터
    assert_eq!(
        model.forward(&array![0.0f32, 0.0, 7.0], None),
        Err(FunctionError::HypersphereDivide)
    );

    // NaN은 압축을 거쳐 초구 레이어에서 잡힌다
    let e = model.forward(&array![f32::NAN, 1.0, 1.0], None).unwrap_err();
    assert!(matches!(e, FunctionError::HypersphereNaN { .. }));
    Ok(())
}

#[test]
fn 검사_없는_순방향은_연산자_오류로_실패() -> Result<()> {
    let model = projection_model()?;
    let e = model.forward_unchecked(&array![1.0f32, 2.0], None).unwrap_err();
    assert!(matches!(e, FunctionError::Operator(_)));
    Ok(())
}

#[test]
fn 배치_순방향은_순서를_보존() -> Result<()> {
    let model = Cyclops::from_dimensions(6, 2, 3, &mut StdRng::seed_from_u64(8))?;
    let samples: Vec<(Array1<f32>, Vec<i32>)> = (0..16)
        .map(|k| {
            let x = (0..6).map(|i| ((k * 6 + i) as f32 * 0.37).cos()).collect();
            (x, vec![k % 2, (k / 2) % 2])
        })
        .collect();

    let outputs = model.forward_batch(&samples)?;
    assert_eq!(outputs.len(), samples.len());
    for ((x, h), y) in samples.iter().zip(outputs.iter()) {
        assert_eq!(&model.forward(x, Some(h.as_slice()))?, y);
    }

    let mut bad = samples.clone();
    bad[5].1 = vec![1];
    assert_eq!(
        model.forward_batch(&bad),
        Err(FunctionError::MultihotDimensionMismatch { actual: 1, expected: 2 })
    );
    Ok(())
}

#[test]
fn 모델은_여러_스레드에서_공유된다() -> Result<()> {
    let model = Cyclops::from_dimensions(5, 1, 2, &mut StdRng::seed_from_u64(12))?;
    let x = array![0.1f32, 0.2, 0.3, 0.4, 0.5];
    let expected = model.forward(&x, Some(&[1][..]))?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| model.forward(&x, Some(&[1][..]))))
            .collect();
        for handle in handles {
            let y = handle.join().expect("스레드 패닉");
            assert_eq!(y.as_ref().ok(), Some(&expected));
        }
    });
    Ok(())
}

#[test]
fn 생성_에러와_함수_에러는_분리된다() -> Result<()> {
    let construction: CyclopsError = CyclopsConfig::new(2)
        .validate()
        .map_err(CyclopsError::from)
        .unwrap_err();
    assert!(construction.is_construction());
    assert_eq!(
        construction,
        CyclopsError::Construction(ConstructionError::InputAndHypersphereDomain { n: 2, c: 2 })
    );

    let model = Cyclops::from_config(&CyclopsConfig::new(4), &mut StdRng::seed_from_u64(0))?;
    let function: CyclopsError = model
        .forward(&Array1::zeros(3), None)
        .map_err(CyclopsError::from)
        .unwrap_err();
    assert!(function.is_function());
    Ok(())
}
