pub mod timeunit;
