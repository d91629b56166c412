use super::helpers;
use anyhow::anyhow;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub(crate) static BACKGROUND_WGSL: &str = include_str!("../../shaders/background.wgsl");

/// Fetch and decode an image. Resolves once the browser can draw it.
pub async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow!("create <img>: {:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow!("decode {}: {:?}", url, e))?;
    if img.natural_width() == 0 || img.natural_height() == 0 {
        return Err(anyhow!("{} decoded to an empty image", url));
    }
    Ok(img)
}

pub(crate) struct BackgroundResources {
    pub(crate) texture: wgpu::Texture,
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_background_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &web::HtmlImageElement,
    color_format: wgpu::TextureFormat,
) -> BackgroundResources {
    let width = image.natural_width();
    let height = image.natural_height();
    let (texture, view) = helpers::create_texture(
        device,
        "background_tex",
        width,
        height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
    );
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLImageElement(image.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("background_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let bgl = helpers::texture_bind_group_layout(device, "background_bgl");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("background_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("background_shader"),
        source: wgpu::ShaderSource::Wgsl(BACKGROUND_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("background_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Depth writes off so the meshes always draw over it
    let pipeline = helpers::make_pipeline(
        device,
        "background_pipeline",
        &pl,
        &shader,
        "vs_fullscreen",
        "fs_background",
        &[],
        color_format,
        false,
    );

    BackgroundResources {
        texture,
        pipeline,
        bind_group,
    }
}
