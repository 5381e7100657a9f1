use glam::{Mat4, Vec3};

/// Upper bound on point lights the scene uniform can carry
pub const MAX_LIGHTS: usize = 16;

/// Mesh vertex for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-object instance data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    /// Linear albedo in xyz, roughness in w
    pub color_roughness: [f32; 4],
    /// Linear emissive in xyz, metalness in w
    pub emissive_metalness: [f32; 4],
    /// `SHADOW_CAST` / `SHADOW_RECEIVE` bits in x
    pub shadow_flags: [u32; 4],
}

pub const SHADOW_CAST: u32 = 1;
pub const SHADOW_RECEIVE: u32 = 2;

impl InstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
        8 => Uint32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Point light as laid out in the scene uniform
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub range: f32,
    pub color: [f32; 3],
    pub intensity: f32,
    /// First of six shadow map layers, or -1 when the light casts none
    pub shadow_layer: i32,
    pub shadow_bias: f32,
    /// One shadow map texel in UV units, for PCF
    pub shadow_texel: f32,
    pub _pad: f32,
}

impl Default for LightUniform {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            range: 0.0,
            color: [0.0; 3],
            intensity: 0.0,
            shadow_layer: -1,
            shadow_bias: 0.0,
            shadow_texel: 0.0,
            _pad: 0.0,
        }
    }
}

/// View-projection of every shadow map layer, six per shadow-casting light
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadowUniform {
    pub view_proj: [[[f32; 4]; 4]; SHADOW_LAYERS],
}

pub const SHADOW_FACES: usize = 6;
pub const SHADOW_LAYERS: usize = MAX_LIGHTS * SHADOW_FACES;

impl ShadowUniform {
    pub fn new(faces: &[Mat4]) -> Self {
        let mut view_proj = [[[0.0; 4]; 4]; SHADOW_LAYERS];
        for (slot, face) in view_proj.iter_mut().zip(faces) {
            *slot = face.to_cols_array_2d();
        }
        Self { view_proj }
    }
}

/// Camera, ambient term and light array, bound once per frame
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub light_count: u32,
    pub ambient: [f32; 3],
    pub _pad: f32,
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl SceneUniform {
    pub fn new(view_proj: Mat4, camera_position: Vec3, ambient: [f32; 3]) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_position: camera_position.to_array(),
            light_count: 0,
            ambient,
            _pad: 0.0,
            lights: [LightUniform::default(); MAX_LIGHTS],
        }
    }

    /// Fill the light array, dropping anything past `MAX_LIGHTS`
    pub fn with_lights(mut self, lights: impl IntoIterator<Item = LightUniform>) -> Self {
        let mut count = 0;
        for (slot, light) in self.lights.iter_mut().zip(lights) {
            *slot = light;
            count += 1;
        }
        self.light_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
        assert_eq!(std::mem::size_of::<SceneUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<ShadowUniform>(), SHADOW_LAYERS * 64);
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 112);
    }

    #[test]
    fn test_with_lights_caps_at_max() {
        let light = LightUniform {
            position: [1.0, 2.0, 3.0],
            range: 200.0,
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            ..LightUniform::default()
        };
        let uniform = SceneUniform::new(Mat4::IDENTITY, Vec3::ZERO, [0.0; 3])
            .with_lights(std::iter::repeat(light).take(MAX_LIGHTS + 4));

        assert_eq!(uniform.light_count as usize, MAX_LIGHTS);
        assert_eq!(uniform.lights[MAX_LIGHTS - 1], light);
    }

    #[test]
    fn test_with_lights_partial_fill() {
        let uniform = SceneUniform::new(Mat4::IDENTITY, Vec3::ZERO, [0.0; 3])
            .with_lights(vec![LightUniform::default(); 3]);
        assert_eq!(uniform.light_count, 3);
    }

    #[test]
    fn test_default_light_has_no_shadow() {
        assert_eq!(LightUniform::default().shadow_layer, -1);
    }

    #[test]
    fn test_shadow_uniform_copies_faces_in_order() {
        let faces = [Mat4::IDENTITY, Mat4::from_scale(Vec3::splat(2.0))];
        let uniform = ShadowUniform::new(&faces);
        assert_eq!(uniform.view_proj[0], Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.view_proj[1][0][0], 2.0);
        assert_eq!(uniform.view_proj[2], [[0.0; 4]; 4]);
    }
}
