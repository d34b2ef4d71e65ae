extern crate docopt;
extern crate env_logger;
extern crate handlebars_iron;
extern crate iron;
extern crate logger;
extern crate mount;
extern crate router;
#[macro_use]
extern crate serde_derive;
extern crate staticfile;
extern crate thermo;

use std::path::PathBuf;

use docopt::Docopt;
use handlebars_iron::{DirectorySource, HandlebarsEngine};
use iron::prelude::*;
use logger::Logger;
use mount::Mount;
use router::Router;
use staticfile::Static;
use thermo::server::{ConvertHandler, IndexHandler};

const USAGE: &'static str = "
Thermo temperature conversion server.

Usage:
    thermo serve <addr> [--resource-dir=<dir>]
    thermo (-h | --help)
    thermo --version

Options:
    -h --help               Show this screen.
    --version               Show version.
    --resource-dir=<dir>    The root directory for static web resources, e.g. templates and
                            stylesheets [default: .].
";

#[derive(Debug, Deserialize)]
struct Args {
    cmd_serve: bool,
    arg_addr: String,
    flag_resource_dir: String,
}

fn main() {
    env_logger::init();

    let args: Args = Docopt::new(USAGE)
        .map(|d| d.version(option_env!("CARGO_PKG_VERSION").map(|s| s.to_string())))
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let resource_path = PathBuf::from(args.flag_resource_dir);

    let mut hbse = HandlebarsEngine::new();
    let mut template_path = resource_path.clone();
    template_path.push("templates");
    hbse.add(Box::new(DirectorySource::new(template_path.to_str().unwrap(), ".hbs")));
    hbse.reload().unwrap();

    let mut router = Router::new();
    router.get("/", IndexHandler, "index");
    router.get("/convert", ConvertHandler, "convert");

    let mut mount = Mount::new();
    let mut static_path = resource_path.clone();
    static_path.push("static");
    mount.mount("/static/", Static::new(static_path));
    mount.mount("/", router);

    let mut chain = Chain::new(mount);
    chain.link_after(hbse);
    chain.link(Logger::new(None));

    Iron::new(chain).http(args.arg_addr.as_str()).unwrap();
}
