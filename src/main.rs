use chargingled::logs;
use chargingled::prefs::FilePreferences;
use chargingled::settings::{ChargingLedSetting, CHARGING_LED_NODE};
use chargingled::sysfs;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::error::Error;
use syslog::{Facility, Formatter3164, BasicLogger};
use log::{LevelFilter, debug, info, warn};

const APPNAME: &'static str = "chargingled";
const PREFS_FILE: &'static str = "/var/lib/chargingled/prefs.toml";

struct Options<'a> {
    node: &'a str,
    prefs: &'a str,
    log_std: bool,
}

impl<'a> Options<'a> {
    fn from_matches(args: &'a ArgMatches) -> Self {
        Options {
            node: value_of(args, "node").unwrap_or(CHARGING_LED_NODE),
            prefs: value_of(args, "prefs").unwrap_or(PREFS_FILE),
            log_std: is_present(args, "logStd"),
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new(APPNAME)
        .version("1.0")
        .author("soporte <soporte@nebulae.com.co>")
        .about("charging led switch")
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("node")
                .short("n")
                .long("node")
                .value_name("node")
                .help("sysfs node of the charging led, example: /sys/class/gpio/gpio168/value")
                .takes_value(true)
                .global(true))
        .arg(
            Arg::with_name("prefs")
                .short("p")
                .long("prefs")
                .value_name("prefs")
                .help("file holding the stored preferences")
                .takes_value(true)
                .global(true))
        .arg(Arg::with_name("logStd")
                .short("l")
                .long("logStd")
                .help("set log to stdout")
                .global(true))
        .subcommand(SubCommand::with_name("restore")
                .about("re-apply the stored preference, run at boot or resume"))
        .subcommand(SubCommand::with_name("set")
                .about("switch the charging led on or off")
                .arg(Arg::with_name("state")
                    .required(true)
                    .possible_values(&["on", "off"])))
        .subcommand(SubCommand::with_name("show")
                .about("print the control and node state"))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = app().get_matches();
    let opts = Options::from_matches(&args);

    let formatter = Formatter3164 {
        facility: Facility::LOG_USER,
        hostname: None,
        process: APPNAME.to_owned(),
        pid: 0,
    };

    if !opts.log_std {
        let logger = syslog::unix(formatter)?;
        log::set_boxed_logger(Box::new(BasicLogger::new(logger)))
                .map(|()| log::set_max_level(LevelFilter::Debug))?;
    } else {
        logs::init_std_log()?;
    }

    let node = opts.node;
    info!("node: {}, prefs: {}", node, opts.prefs);

    let prefs = FilePreferences::load(opts.prefs);

    match args.subcommand() {
        ("restore", _) => {
            match ChargingLedSetting::restore(&prefs, node) {
                Ok(true) => {},
                Ok(false) => info!("{} not present, nothing to restore", node),
                Err(err) => debug!("restore failed: {}", err),
            }
        },
        ("set", Some(sub)) => set(prefs, node, sub),
        _ => show(prefs, node),
    }

    Ok(())
}

// global flags may be given before or after the subcommand
fn value_of<'a>(args: &'a ArgMatches, name: &str) -> Option<&'a str> {
    args.subcommand()
        .1
        .and_then(|sub| sub.value_of(name))
        .or_else(|| args.value_of(name))
}

fn is_present(args: &ArgMatches, name: &str) -> bool {
    args.is_present(name) || args.subcommand().1.map_or(false, |sub| sub.is_present(name))
}

fn set(prefs: FilePreferences, node: &str, sub: &ArgMatches) {
    let checked = sub.value_of("state") == Some("on");
    let mut setting = ChargingLedSetting::new(prefs, node);
    if !setting.is_enabled() {
        warn!("{} not present, charging led control is disabled", node);
        return;
    }
    setting.toggle(checked);
}

fn show(prefs: FilePreferences, node: &str) {
    let setting = ChargingLedSetting::new(prefs, node);
    println!("enabled: {}", setting.is_enabled());
    println!("checked: {}", setting.is_checked());
    match sysfs::read_line(setting.node()) {
        Some(line) => println!("node: {}", line),
        None => println!("node: -"),
    }
}
