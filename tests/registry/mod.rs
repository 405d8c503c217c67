mod tests_builtin_classify;
mod tests_builtin_resolve;
mod tests_concurrent;
