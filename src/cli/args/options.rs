use clap::ValueEnum;
use leetex_core::ReferenceLanguage;

/// Reference languages accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LanguageArg {
	Java,
	#[value(alias = "js")]
	Javascript,
	#[value(alias = "py")]
	Python,
	#[value(alias = "cpp")]
	Cplusplus,
}

impl LanguageArg {
	/// Return the key consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		ReferenceLanguage::from(self).key()
	}
}

impl From<LanguageArg> for ReferenceLanguage {
	fn from(arg: LanguageArg) -> Self {
		match arg {
			LanguageArg::Java => Self::Java,
			LanguageArg::Javascript => Self::JavaScript,
			LanguageArg::Python => Self::Python,
			LanguageArg::Cplusplus => Self::Cpp,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
