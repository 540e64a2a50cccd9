use clap::{Arg, Command};
use std::str::FromStr;
use tracing::info;

use rktgeom::logging::{init_logging, parse_log_level, LogConfig, LogOutput};
use rktgeom::models::*;
use rktgeom::scenario::*;

fn main() {
    // コマンドライン引数の解析
    let matches = Command::new("rktgeom")
        .version("0.1.0")
        .about("ロケット弾ターゲット形状定義ツール (Rocket Target Geometry)")
        .long_about("計測実験用ターゲット形状のパラメータモデル構築ツール\n\
                     主胴体・ノーズコーン・尾部の3コンポーネントからなる\n\
                     簡易ロケット弾形状を構築・表示します。")
        .arg(
            Arg::new("scenario")
                .short('s')
                .long("scenario")
                .value_name("FILE")
                .help("シナリオファイル(.yaml)のパスを指定")
                .long_help("読み込むシナリオファイル(.yaml)のパスを指定します。\n\
                           指定しない場合、利用可能なシナリオ一覧が表示されます。")
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .action(clap::ArgAction::SetTrue)
                .help("シナリオの情報のみ表示して終了")
                .conflicts_with("test")
        )
        .arg(
            Arg::new("test")
                .short('t')
                .long("test")
                .action(clap::ArgAction::SetTrue)
                .help("実験既定パラメータで形状モデルの構築テストを実行")
                .conflicts_with("info")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::Count)
                .help("詳細出力レベル (-v: 基本, -vv: 詳細, -vvv: デバッグ)")
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("ログレベル (trace, debug, info, warn, error)")
        )
        .arg(
            Arg::new("log-output")
                .long("log-output")
                .value_name("MODE")
                .help("ログ出力先 (console, file, both)")
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .value_name("DIR")
                .help("ログファイルの出力ディレクトリ (既定: logs)")
        )
        .get_matches();

    println!("ロケット弾ターゲット形状定義ツール (Rocket Target Geometry) - rktgeom v0.1.0");
    println!();

    // ログシステムの初期化
    if let Err(e) = setup_logging(&matches) {
        eprintln!("エラー: ログ初期化に失敗しました: {}", e);
        std::process::exit(1);
    }

    // 詳細レベルの設定
    let verbose_level = matches.get_count("verbose");
    if verbose_level > 0 {
        println!("詳細出力レベル: {}", verbose_level);
    }

    // テストモードの実行
    if matches.get_flag("test") {
        println!("=== 形状モデルテストモード ===");
        test_geometry_models();
        return;
    }

    // シナリオファイルの処理
    if let Some(scenario_path) = matches.get_one::<String>("scenario") {
        match run_scenario(scenario_path, matches.get_flag("info"), verbose_level) {
            Ok(_) => {
                if verbose_level > 0 {
                    println!("シナリオ処理が正常に完了しました。");
                }
            }
            Err(e) => {
                eprintln!("エラー: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        // デフォルト動作: 利用可能なシナリオ一覧を表示
        show_default_help();
    }
}

/// コマンドライン引数からログ設定を組み立てて初期化
fn setup_logging(matches: &clap::ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LogConfig::default();

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.level = parse_log_level(level);
    }
    if let Some(output) = matches.get_one::<String>("log-output") {
        config.output = LogOutput::from_str(output)?;
    }
    if let Some(dir) = matches.get_one::<String>("log-dir") {
        config.log_dir = dir.clone();
    }

    init_logging(config)
}

fn test_geometry_models() {
    println!("\n=== 形状モデルの構築テスト ===");

    // 主胴体の構築
    let main_body = CylinderParams::new(Axis::Z, 0.25, 0.0, 0.0, 6.14);
    println!(
        "主胴体が構築されました: {}軸沿い円柱 外半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
        main_body.orientation_axis, main_body.outer_radius, main_body.start, main_body.end
    );

    // ノーズコーンの構築
    let nose_cone = ConeParams::new(Axis::Z, 0.25, 0.0, 6.14, 6.64);
    println!(
        "ノーズコーンが構築されました: {}軸沿い円錐 底面半径 {:.2}m 頂面半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
        nose_cone.orientation_axis,
        nose_cone.bottom_radius,
        nose_cone.top_radius,
        nose_cone.start,
        nose_cone.end
    );

    // 尾部の構築
    let tail_section = CylinderParams::new(Axis::X, 0.20, 0.0, 0.0, 0.50);
    println!(
        "尾部が構築されました: {}軸沿い円柱 外半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
        tail_section.orientation_axis, tail_section.outer_radius, tail_section.start, tail_section.end
    );

    // 集約モデルの組み立て
    let geometry = RocketGeometry::new(main_body, nose_cone, tail_section);
    println!("ターゲット形状が組み立てられました");

    // 実験既定ファクトリとの一致確認
    if geometry == RocketGeometry::experiment_defaults() {
        println!("実験既定パラメータとの一致を確認しました");
    }

    println!("\n全てのコンポーネントが正常に構築されました！");
}

/// シナリオファイルを読み込んで処理
fn run_scenario(scenario_path: &str, info_only: bool, verbose_level: u8) -> Result<(), Box<dyn std::error::Error>> {
    // シナリオファイルの読み込み
    let scenario = GeometryScenario::from_file(scenario_path)?;
    info!(path = %scenario_path, "SCENARIO_LOAD: シナリオファイルを読み込みました");

    if verbose_level > 0 {
        println!("シナリオファイル読み込み完了: {}", scenario_path);
    }

    // 情報表示のみの場合
    if info_only {
        scenario.print_summary();
        return Ok(());
    }

    // ターゲット形状の構築と報告
    build_and_report(scenario, verbose_level)?;

    Ok(())
}

/// ターゲット形状を構築して結果を表示
fn build_and_report(scenario: GeometryScenario, verbose_level: u8) -> Result<(), Box<dyn std::error::Error>> {
    // 基本情報表示
    scenario.print_summary();
    println!();

    // 設定から検証済みモデルを組み立て
    let geometry = scenario.build_target()?;
    info!(
        main_axis = %geometry.main_body.orientation_axis,
        tail_axis = %geometry.tail_section.orientation_axis,
        "TARGET_BUILD: ターゲット形状を構築しました"
    );

    println!("=== 構築結果 ===");
    report_geometry(&geometry, verbose_level);

    Ok(())
}

/// 構築済みターゲット形状の各コンポーネントを表示
fn report_geometry(geometry: &RocketGeometry, verbose_level: u8) {
    let body = &geometry.main_body;
    println!(
        "主胴体: {}軸沿い円柱 外半径 {:.2}m 内半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
        body.orientation_axis, body.outer_radius, body.inner_radius, body.start, body.end
    );

    let cone = &geometry.nose_cone;
    println!(
        "ノーズコーン: {}軸沿い円錐 底面半径 {:.2}m 頂面半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
        cone.orientation_axis, cone.bottom_radius, cone.top_radius, cone.start, cone.end
    );

    let tail = &geometry.tail_section;
    println!(
        "尾部: {}軸沿い円柱 外半径 {:.2}m 内半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
        tail.orientation_axis, tail.outer_radius, tail.inner_radius, tail.start, tail.end
    );

    if verbose_level > 0 {
        println!();
        println!("寸法の詳細:");
        println!("  主胴体長: {:.2}m", body.end - body.start);
        println!("  ノーズコーン長: {:.2}m", cone.end - cone.start);
        println!("  尾部長: {:.2}m", tail.end - tail.start);
    }
}

/// デフォルトヘルプとシナリオ一覧を表示
fn show_default_help() {
    println!("使用方法:");
    println!("  rktgeom [オプション]");
    println!();
    println!("オプション:");
    println!("  -s, --scenario <FILE>  シナリオファイルを指定して形状を構築");
    println!("  -i, --info             シナリオ情報のみ表示");
    println!("  -t, --test             実験既定パラメータで構築テストを実行");
    println!("  -v, --verbose          詳細出力 (複数指定で詳細レベル上昇)");
    println!("  --log-level <LEVEL>    ログレベルを指定");
    println!("  --log-output <MODE>    ログ出力先を指定 (console, file, both)");
    println!("  -h, --help             このヘルプを表示");
    println!();
    println!("利用可能なシナリオファイル:");
    println!("  scenarios/experiment_rocket.yaml  - 計測実験・標準ロケット弾");
    println!("  scenarios/hollow_body.yaml        - 中空胴体の変種");
    println!("  scenarios/invalid_axis_test.yaml  - 軸記号エラーの確認用");
    println!();
    println!("例:");
    println!("  rktgeom -s scenarios/experiment_rocket.yaml");
    println!("  rktgeom -s scenarios/hollow_body.yaml -v");
    println!("  rktgeom -s scenarios/experiment_rocket.yaml -i");
    println!("  rktgeom --test");
}
