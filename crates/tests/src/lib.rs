
#[cfg(test)]
mod spinner_render_tests;

#[cfg(test)]
mod skeleton_render_tests;


#[cfg(test)]
mod theme_provider_tests;

#[cfg(test)]
mod animation_lifecycle_tests;
