use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from GitHub:\n    prion install https://github.com/tpope/vim-sensible.git\n    \
                   prion install git@github.com:tpope/vim-fugitive.git\n\n\
                   Install from a local repository:\n    prion install ~/src/my-plugin\n\n\
                   Replace an installed plugin without asking:\n    prion install --force https://github.com/tpope/vim-sensible.git")]
pub struct InstallArgs {
    /// Git URLs of the plugins; the last path segment, minus `.git`, names the plugin
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// Replace plugins that are already installed
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Answer yes when asked whether to replace an installed plugin
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl InstallArgs {
    /// Whether installed plugins are replaced without asking.
    pub fn replace_without_asking(&self) -> bool {
        self.force || self.yes
    }
}
