pub fn get_signature(version: &str) -> String {
    format!(
        r#"
   __      ___ __  _
   \ \ /\ / / '_ \| |__  _   _ _ __ ___  _ __
    \ V  V /| |_) | '_ \| | | | '_ ` _ \| '_ \
     \_/\_/ | .__/| |_) | |_| | | | | | | |_) |
            |_|   |_.__/ \__,_|_| |_| |_| .__/
                                        |_|
   Version bumper for WordPress plugins.

   v{}
"#,
        version
    )
}
