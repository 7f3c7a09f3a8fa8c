mod tests_lines;
mod tests_patterns;
