use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sos::{
    init_logging, CliStrategy, GameConfig, GameEngine, Letter, MoveStrategy, Player,
    RandomStrategy, Variant,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerType {
    Human,
    Computer,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Simple,
    General,
}

impl From<Mode> for Variant {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Simple => Variant::Simple,
            Mode::General => Variant::General,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LetterArg {
    S,
    O,
}

impl From<LetterArg> for Letter {
    fn from(arg: LetterArg) -> Self {
        match arg {
            LetterArg::S => Letter::S,
            LetterArg::O => Letter::O,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Mode::Simple)]
        mode: Mode,
        #[arg(long, default_value_t = 8, help = "Board edge length (3-8)")]
        size: usize,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        blue: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Computer)]
        red: PlayerType,
        #[arg(long, value_enum, default_value_t = LetterArg::S)]
        blue_letter: LetterArg,
        #[arg(long, value_enum, default_value_t = LetterArg::S)]
        red_letter: LetterArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run seeded computer-vs-computer games and print one result line each.
    Sim {
        #[arg(long, value_enum, default_value_t = Mode::General)]
        mode: Mode,
        #[arg(long, default_value_t = 8, help = "Board edge length (3-8)")]
        size: usize,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            size,
            blue,
            red,
            blue_letter,
            red_letter,
            seed,
        } => {
            let mut config = GameConfig::new(mode.into(), size)?;
            config.blue_automated = matches!(blue, PlayerType::Computer);
            config.red_automated = matches!(red, PlayerType::Computer);
            config.blue_letter = blue_letter.into();
            config.red_letter = red_letter.into();
            play(config, seed)
        }
        Commands::Sim {
            mode,
            size,
            games,
            seed,
        } => sim(mode.into(), size, games, seed),
    }
}

fn play(config: GameConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut engine = GameEngine::new(config)?;
    let mut human = CliStrategy::new();
    let mut computer = RandomStrategy::new();

    println!("Game started. Current turn: {}", engine.current_player());
    loop {
        println!("\n{}", engine.board());
        if engine.is_game_over() {
            break;
        }
        let player = engine.current_player();
        let automated = config.is_automated(player);
        let mv = if automated {
            computer.choose_move(&mut rng, &engine, player)
        } else {
            human.choose_move(&mut rng, &engine, player)
        };
        let Some(mv) = mv else {
            println!("No move available; stopping.");
            break;
        };
        match engine.place_letter(mv.row, mv.col, mv.letter) {
            Ok(count) => {
                if automated {
                    println!(
                        "{} plays {} at {}{}",
                        player,
                        mv.letter,
                        (b'A' + mv.col as u8) as char,
                        mv.row + 1
                    );
                }
                if count > 0 {
                    println!("SOS! {} completed {} sequence(s).", player, count);
                }
                println!("{}", engine.status_text());
            }
            Err(err) => println!("Move rejected: {}", err),
        }
    }
    println!("{}", engine.status_text());
    Ok(())
}

fn sim(variant: Variant, size: usize, games: u32, seed: u64) -> anyhow::Result<()> {
    for i in 0..games {
        let mut config = GameConfig::new(variant, size)?;
        config.blue_automated = true;
        config.red_automated = true;
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        let mut engine = GameEngine::new(config)?;
        let mut strategy = RandomStrategy::new();

        while !engine.is_game_over() {
            let player = engine.current_player();
            let Some(mv) = strategy.choose_move(&mut rng, &engine, player) else {
                break;
            };
            engine.place_letter(mv.row, mv.col, mv.letter)?;
        }
        println!(
            "game {}: {} (Blue {}, Red {}, {} sequences)",
            i,
            engine.status_text(),
            engine.score(Player::Blue),
            engine.score(Player::Red),
            engine.sequences().len()
        );
    }
    Ok(())
}
